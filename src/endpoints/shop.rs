use crate::client::{ApiError, Client, Transport};
use crate::types::ShopItem;

impl<T: Transport> Client<T> {
    /// All shop products.
    pub fn products(&self) -> Result<Vec<ShopItem>, ApiError> {
        self.request_single("/v1/simpleshop/product/all", &[])
    }
}
