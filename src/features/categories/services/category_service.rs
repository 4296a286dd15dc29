use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryPageDto, CategoryResponseDto, CreateCategoryDto,
};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::listings::dtos::ListingResponseDto;
use crate::features::listings::models::ListingFilter;
use crate::features::listings::repositories::ListingRepository;

/// Service for category operations
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    listings: Arc<dyn ListingRepository>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        listings: Arc<dyn ListingRepository>,
    ) -> Self {
        Self {
            categories,
            listings,
        }
    }

    /// All categories, plus the open listings of `title` when one is given.
    /// An unknown title yields an empty list rather than an error.
    pub async fn browse(&self, title: Option<String>, now: DateTime<Utc>) -> Result<CategoryPageDto> {
        let categories = self
            .categories
            .list_all()
            .await?
            .into_iter()
            .map(CategoryResponseDto::from)
            .collect();

        let listings = match title {
            Some(title) => {
                let listings = self
                    .listings
                    .list(ListingFilter::ActiveInCategory { title, now })
                    .await?;
                Some(
                    listings
                        .into_iter()
                        .map(|l| ListingResponseDto::from_listing(l, now))
                        .collect(),
                )
            }
            None => None,
        };

        Ok(CategoryPageDto {
            categories,
            listings,
        })
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = self.categories.insert(&dto.title).await?;
        tracing::info!("Category created: {} ({})", category.title, category.id);
        Ok(category.into())
    }

    /// Listings in the category stay, with no category
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.categories.delete(id).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        tracing::info!("Category deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::listings::models::NewListing;
    use crate::modules::persistence::InMemoryStore;
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn service(store: &InMemoryStore) -> CategoryService {
        CategoryService::new(Arc::new(store.clone()), Arc::new(store.clone()))
    }

    fn title(t: &str) -> CreateCategoryDto {
        CreateCategoryDto {
            title: t.to_string(),
        }
    }

    async fn listing_in(store: &InMemoryStore, category_id: Option<Uuid>) -> Uuid {
        ListingRepository::insert(
            store,
            NewListing {
                item_name: "Atlas".to_string(),
                item_description: "1950 edition".to_string(),
                image_url: None,
                start_time: Utc::now(),
                end_time: Utc::now() + Duration::days(1),
                start_bid: Decimal::from(20),
                owner_id: Uuid::now_v7(),
                category_id,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn browse_without_selection_has_no_listings() {
        let store = InMemoryStore::new();
        let service = service(&store);
        service.create(title("Books")).await.unwrap();

        let page = service.browse(None, Utc::now()).await.unwrap();

        assert_eq!(page.categories.len(), 1);
        assert!(page.listings.is_none());
    }

    #[tokio::test]
    async fn browse_filters_by_title() {
        let store = InMemoryStore::new();
        let service = service(&store);
        let books = service.create(title("Books")).await.unwrap();
        let toys = service.create(title("Toys")).await.unwrap();
        let book = listing_in(&store, Some(books.id)).await;
        listing_in(&store, Some(toys.id)).await;
        listing_in(&store, None).await;

        let page = service
            .browse(Some("Books".to_string()), Utc::now())
            .await
            .unwrap();

        let ids: Vec<Uuid> = page.listings.unwrap().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![book]);
    }

    #[tokio::test]
    async fn unknown_title_gives_empty_list() {
        let store = InMemoryStore::new();

        let page = service(&store)
            .browse(Some("Nope".to_string()), Utc::now())
            .await
            .unwrap();

        assert_eq!(page.listings.map(|l| l.len()), Some(0));
    }

    #[tokio::test]
    async fn duplicate_title_conflicts() {
        let store = InMemoryStore::new();
        let service = service(&store);
        service.create(title("Books")).await.unwrap();

        let result = service.create(title("Books")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn delete_detaches_listings() {
        let store = InMemoryStore::new();
        let service = service(&store);
        let books = service.create(title("Books")).await.unwrap();
        let listing_id = listing_in(&store, Some(books.id)).await;

        service.delete(books.id).await.unwrap();

        let listing = ListingRepository::find(&store, listing_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(listing.category_id, None);
        assert!(matches!(
            service.delete(books.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
