use std::sync::Arc;

use super::repository::{Error, Hello, HelloMapper};

#[derive(Clone)]
pub struct HelloService {
    mapper: Arc<dyn HelloMapper>,
}

impl HelloService {
    pub fn new(mapper: Arc<dyn HelloMapper>) -> Self {
        Self { mapper }
    }

    pub async fn get_hello(&self, id: i32) -> Result<Option<Hello>, Error> {
        self.mapper.select_by_id(id).await
    }
}
