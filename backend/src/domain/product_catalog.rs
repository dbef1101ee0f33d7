//! Product lineup behind the machine's selection buttons.

use std::collections::HashSet;

use thiserror::Error;

use super::models::Product;

/// Prices of the default nine-button lineup
pub const DEFAULT_PRICES: [u64; 9] = [300, 400, 500, 600, 700, 800, 900, 1000, 1100];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product catalog is empty")]
    Empty,
    #[error("duplicate product code {0}")]
    DuplicateCode(String),
    #[error("product {0} must have a price greater than 0")]
    ZeroPrice(String),
    #[error("product code must not be blank")]
    BlankCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Nine buttons, FE300 through FE1100
    pub fn default_lineup() -> Self {
        let products = DEFAULT_PRICES
            .iter()
            .map(|&price| {
                let code = Product::code_for_price(price);
                Product::new(code.clone(), code, price)
            })
            .collect();
        Self { products }
    }

    /// Build a catalog from configured products, keeping their order
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for product in &products {
            if product.code.trim().is_empty() {
                return Err(CatalogError::BlankCode);
            }
            if product.price == 0 {
                return Err(CatalogError::ZeroPrice(product.code.clone()));
            }
            if !seen.insert(product.code.as_str()) {
                return Err(CatalogError::DuplicateCode(product.code.clone()));
            }
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Products the given total can pay for
    pub fn affordable(&self, total: u64) -> Vec<&Product> {
        self.products.iter().filter(|p| p.price <= total).collect()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::default_lineup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lineup() {
        let catalog = ProductCatalog::default_lineup();
        let codes: Vec<&str> = catalog.products().iter().map(|p| p.code.as_str()).collect();

        assert_eq!(
            codes,
            ["FE300", "FE400", "FE500", "FE600", "FE700", "FE800", "FE900", "FE1000", "FE1100"]
        );
        assert_eq!(catalog.find("FE700").unwrap().price, 700);
        assert!(catalog.find("FE1200").is_none());
    }

    #[test]
    fn test_affordable() {
        let catalog = ProductCatalog::default_lineup();

        assert!(catalog.affordable(0).is_empty());
        assert!(catalog.affordable(299).is_empty());
        assert_eq!(catalog.affordable(450).len(), 2);
        assert_eq!(catalog.affordable(5000).len(), 9);
    }

    #[test]
    fn test_from_products_validation() {
        assert_eq!(ProductCatalog::from_products(vec![]), Err(CatalogError::Empty));

        let duplicate = vec![Product::new("A", "Cola", 800), Product::new("A", "Cider", 700)];
        assert_eq!(
            ProductCatalog::from_products(duplicate),
            Err(CatalogError::DuplicateCode("A".to_string()))
        );

        let free = vec![Product::new("B", "Water", 0)];
        assert_eq!(
            ProductCatalog::from_products(free),
            Err(CatalogError::ZeroPrice("B".to_string()))
        );

        let blank = vec![Product::new("  ", "Coffee", 500)];
        assert_eq!(ProductCatalog::from_products(blank), Err(CatalogError::BlankCode));
    }

    #[test]
    fn test_from_products_keeps_order() {
        let catalog = ProductCatalog::from_products(vec![
            Product::new("COLA", "콜라", 1100),
            Product::new("WATER", "생수", 600),
        ])
        .unwrap();

        assert_eq!(catalog.products()[0].code, "COLA");
        assert_eq!(catalog.affordable(700)[0].name, "생수");
    }
}
