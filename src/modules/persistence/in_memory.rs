use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::{NewUser, Session, User};
use crate::features::auth::repositories::{SessionRepository, UserRepository};
use crate::features::bids::models::{Bid, BidWithBidder, NewBid};
use crate::features::bids::repositories::{BidCheck, BidRepository};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::comments::models::{Comment, NewComment};
use crate::features::comments::repositories::CommentRepository;
use crate::features::listings::models::{Listing, ListingFilter, NewListing};
use crate::features::listings::repositories::ListingRepository;
use crate::features::watchlist::repositories::WatchlistRepository;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    sessions: HashMap<Uuid, Session>,
    categories: Vec<Category>,
    listings: Vec<Listing>,
    bids: Vec<Bid>,
    comments: Vec<Comment>,
    watchlist: HashSet<(Uuid, Uuid)>,
}

impl Tables {
    fn username(&self, user_id: Uuid) -> String {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.username.clone())
            .unwrap_or_default()
    }

    fn is_active(listing: &Listing, now: DateTime<Utc>) -> bool {
        !listing.closed && listing.end_time > now
    }
}

/// Fake in-memory persistence.
///
/// Implements every repository trait over one shared set of tables. Useful
/// for unit-tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Staff accounts are granted out of band, never through the API
    pub async fn grant_staff(&self, username: &str) {
        let mut tables = self.tables.lock().await;
        if let Some(user) = tables.users.iter_mut().find(|u| u.username == username) {
            user.is_staff = true;
        }
    }

    pub async fn user_count(&self) -> usize {
        self.tables.lock().await.users.len()
    }

    pub async fn session_count(&self) -> usize {
        self.tables.lock().await.sessions.len()
    }

    pub async fn bid_count(&self, listing_id: Uuid) -> usize {
        self.tables
            .lock()
            .await
            .bids
            .iter()
            .filter(|b| b.listing_id == listing_id)
            .count()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find(&self, id: Uuid) -> Result<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut tables = self.tables.lock().await;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(AppError::DuplicateUsername);
        }

        let user = User {
            id: Uuid::now_v7(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            is_staff: false,
            date_joined: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn insert(&self, session: Session) -> Result<Session> {
        let mut tables = self.tables.lock().await;
        tables.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Session>> {
        let tables = self.tables.lock().await;
        Ok(tables.sessions.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.lock().await;
        tables.sessions.remove(&id);
        Ok(())
    }

    async fn delete_expired(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<u64> {
        let mut tables = self.tables.lock().await;
        let before = tables.sessions.len();
        tables
            .sessions
            .retain(|_, s| s.user_id != user_id || s.expires_at > now);
        Ok((before - tables.sessions.len()) as u64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Category>> {
        let tables = self.tables.lock().await;
        let mut categories = tables.categories.clone();
        categories.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(categories)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Category>> {
        let tables = self.tables.lock().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, title: &str) -> Result<Category> {
        let mut tables = self.tables.lock().await;
        if tables.categories.iter().any(|c| c.title == title) {
            return Err(AppError::Conflict(format!(
                "Category '{}' already exists",
                title
            )));
        }

        let category = Category {
            id: Uuid::now_v7(),
            title: title.to_string(),
            created_at: Utc::now(),
        };
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut tables = self.tables.lock().await;
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Ok(false);
        }

        for listing in tables.listings.iter_mut() {
            if listing.category_id == Some(id) {
                listing.category_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl ListingRepository for InMemoryStore {
    async fn find(&self, id: Uuid) -> Result<Option<Listing>> {
        let tables = self.tables.lock().await;
        Ok(tables.listings.iter().find(|l| l.id == id).cloned())
    }

    async fn insert(&self, listing: NewListing) -> Result<Listing> {
        let mut tables = self.tables.lock().await;
        let listing = Listing {
            id: Uuid::now_v7(),
            item_name: listing.item_name,
            item_description: listing.item_description,
            image_url: listing.image_url,
            start_time: listing.start_time,
            end_time: listing.end_time,
            start_bid: listing.start_bid,
            closed: false,
            owner_id: listing.owner_id,
            category_id: listing.category_id,
        };
        tables.listings.push(listing.clone());
        Ok(listing)
    }

    async fn save(&self, listing: &Listing) -> Result<Listing> {
        let mut tables = self.tables.lock().await;
        let stored = tables
            .listings
            .iter_mut()
            .find(|l| l.id == listing.id)
            .ok_or_else(|| AppError::NotFound(format!("Listing {} not found", listing.id)))?;

        let start_time = stored.start_time;
        *stored = listing.clone();
        stored.start_time = start_time;
        Ok(stored.clone())
    }

    async fn list(&self, filter: ListingFilter) -> Result<Vec<Listing>> {
        let tables = self.tables.lock().await;

        let mut listings: Vec<Listing> = match &filter {
            ListingFilter::Active { now } => tables
                .listings
                .iter()
                .filter(|l| Tables::is_active(l, *now))
                .cloned()
                .collect(),
            ListingFilter::ActiveInCategory { title, now } => {
                let category_id = tables
                    .categories
                    .iter()
                    .find(|c| &c.title == title)
                    .map(|c| c.id);
                tables
                    .listings
                    .iter()
                    .filter(|l| category_id.is_some() && l.category_id == category_id)
                    .filter(|l| Tables::is_active(l, *now))
                    .cloned()
                    .collect()
            }
            ListingFilter::WatchedBy { user_id, now } => tables
                .listings
                .iter()
                .filter(|l| tables.watchlist.contains(&(*user_id, l.id)))
                .filter(|l| Tables::is_active(l, *now))
                .cloned()
                .collect(),
            ListingFilter::Closed => tables
                .listings
                .iter()
                .filter(|l| l.closed)
                .cloned()
                .collect(),
        };

        match filter {
            ListingFilter::Closed => listings.sort_by(|a, b| a.end_time.cmp(&b.end_time)),
            _ => listings.sort_by(|a, b| b.start_time.cmp(&a.start_time)),
        }
        Ok(listings)
    }

    async fn mark_expired(&self, now: DateTime<Utc>) -> Result<u64> {
        let mut tables = self.tables.lock().await;
        let mut flagged = 0;
        for listing in tables.listings.iter_mut() {
            if !listing.closed && listing.end_time <= now {
                listing.closed = true;
                flagged += 1;
            }
        }
        Ok(flagged)
    }
}

#[async_trait]
impl BidRepository for InMemoryStore {
    async fn list_for_listing(&self, listing_id: Uuid) -> Result<Vec<BidWithBidder>> {
        let tables = self.tables.lock().await;
        let mut bids: Vec<BidWithBidder> = tables
            .bids
            .iter()
            .filter(|b| b.listing_id == listing_id)
            .map(|b| BidWithBidder {
                id: b.id,
                amount: b.amount,
                user_id: b.user_id,
                username: tables.username(b.user_id),
                listing_id: b.listing_id,
                created_at: b.created_at,
            })
            .collect();
        bids.sort_by(|a, b| b.amount.cmp(&a.amount));
        Ok(bids)
    }

    async fn place(&self, bid: NewBid, check: &BidCheck) -> Result<Bid> {
        // Held until the bid is stored, like the row lock in Postgres
        let mut tables = self.tables.lock().await;

        let listing = tables
            .listings
            .iter()
            .find(|l| l.id == bid.listing_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Listing {} not found", bid.listing_id)))?;

        let existing: Vec<Bid> = tables
            .bids
            .iter()
            .filter(|b| b.listing_id == bid.listing_id)
            .cloned()
            .collect();

        check(&listing, &existing)?;

        let placed = Bid {
            id: Uuid::now_v7(),
            amount: bid.amount,
            user_id: bid.user_id,
            listing_id: bid.listing_id,
            created_at: Utc::now(),
        };
        tables.bids.push(placed.clone());
        tables.watchlist.insert((bid.user_id, bid.listing_id));
        Ok(placed)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_for_listing(&self, listing_id: Uuid) -> Result<Vec<Comment>> {
        let tables = self.tables.lock().await;
        // Reverse first so equal timestamps still come out newest first
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .rev()
            .filter(|c| c.listing_id == listing_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment> {
        let mut tables = self.tables.lock().await;
        let comment = Comment {
            id: Uuid::now_v7(),
            message: comment.message,
            created_at: Utc::now(),
            username: tables.username(comment.user_id),
            user_id: comment.user_id,
            listing_id: comment.listing_id,
        };
        tables.comments.push(comment.clone());
        Ok(comment)
    }
}

#[async_trait]
impl WatchlistRepository for InMemoryStore {
    async fn contains(&self, user_id: Uuid, listing_id: Uuid) -> Result<bool> {
        let tables = self.tables.lock().await;
        Ok(tables.watchlist.contains(&(user_id, listing_id)))
    }

    async fn add(&self, user_id: Uuid, listing_id: Uuid) -> Result<()> {
        let mut tables = self.tables.lock().await;
        tables.watchlist.insert((user_id, listing_id));
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, listing_id: Uuid) -> Result<()> {
        let mut tables = self.tables.lock().await;
        tables.watchlist.remove(&(user_id, listing_id));
        Ok(())
    }
}
