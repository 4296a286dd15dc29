mod category_dto;

pub use category_dto::{
    CategoryPageDto, CategoryPageQuery, CategoryResponseDto, CreateCategoryDto,
};
