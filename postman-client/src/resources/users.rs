use postman_core::types::UserResponse;

use crate::client::Client;
use crate::error::Error;

impl Client {
    /// The authenticated user, with plan usage counters.
    pub async fn me(&self) -> Result<UserResponse, Error> {
        self.get("/me").await
    }
}
