use crate::domain::{format_won, Product};
use shared::ProductDto;

/// Maps catalog products to the button DTOs
pub struct ProductMapper;

impl ProductMapper {
    pub fn to_dto(product: &Product) -> ProductDto {
        ProductDto {
            code: product.code.clone(),
            name: product.name.clone(),
            price: product.price,
            formatted_price: format_won(product.price),
        }
    }
}
