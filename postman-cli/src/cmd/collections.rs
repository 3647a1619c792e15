use postman_client::resources::CollectionFilter;

use crate::commands::CollectionsAction;
use crate::exit_codes;
use crate::output::{print_error, print_result};
use crate::OutputArgs;

pub async fn collections_cmd(action: CollectionsAction, output: OutputArgs) -> i32 {
    let client = match super::client_from_env(output.format, output.quiet) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match action {
        CollectionsAction::List { workspace, name } => {
            let filter = CollectionFilter { workspace, name };
            match client.get_collections(&filter).await {
                Ok(collections) => {
                    print_result(output.format, output.quiet, &collections);
                    exit_codes::SUCCESS
                }
                Err(e) => {
                    print_error(output.format, output.quiet, &e.to_string());
                    exit_codes::API_ERROR
                }
            }
        }
        CollectionsAction::Get { collection_id } => {
            match client.get_collection(&collection_id).await {
                Ok(collection) => {
                    print_result(output.format, output.quiet, &collection);
                    exit_codes::SUCCESS
                }
                Err(e) => {
                    print_error(output.format, output.quiet, &e.to_string());
                    exit_codes::API_ERROR
                }
            }
        }
    }
}
