pub mod collections;
pub mod generate;
pub mod specs;
pub mod whoami;
pub mod workspaces;

use postman_client::{Client, Config};

use crate::exit_codes;
use crate::output::{print_error, OutputFormat};

/// Build a client from the environment; entry points are the one place
/// key presence is checked before a request goes out.
pub(crate) fn client_from_env(format: OutputFormat, quiet: bool) -> Result<Client, i32> {
    let config = Config::from_env();
    if !config.has_api_key() {
        print_error(
            format,
            quiet,
            &format!("{} is not set", postman_client::config::API_KEY_ENV),
        );
        return Err(exit_codes::CONFIG_ERROR);
    }
    Ok(Client::new(config))
}
