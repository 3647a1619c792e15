use std::time::Duration;

use postman_client::PollConfig;
use postman_core::types::GenerateCollection;

use crate::commands::GenerateAction;
use crate::exit_codes;
use crate::id_store::IdStore;
use crate::output::{print_error, print_result};
use crate::OutputArgs;

pub async fn generate_cmd(action: GenerateAction, output: OutputArgs) -> i32 {
    let client = match super::client_from_env(output.format, output.quiet) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match action {
        GenerateAction::Collection {
            spec_id,
            name,
            poll,
            ids,
        } => {
            let spec_id = match spec_id {
                Some(id) => id,
                None => {
                    let store = IdStore::load(&ids.ids_file).unwrap_or_default();
                    match store.lookup("spec") {
                        Some(id) => id.to_string(),
                        None => {
                            print_error(
                                output.format,
                                output.quiet,
                                "no spec id given and none saved by a previous `specs create`",
                            );
                            return exit_codes::VALIDATION_FAILED;
                        }
                    }
                }
            };

            let poll_config = PollConfig {
                poll_interval: Duration::from_secs(poll.poll_interval),
                timeout: Duration::from_secs(poll.timeout),
                task_name: "Collection generation".to_string(),
                max_retries: poll.max_retries,
            };
            let input = GenerateCollection {
                name,
                options: None,
            };

            match client
                .generate_collection_and_wait(&spec_id, &input, &poll_config)
                .await
            {
                Ok(status) => {
                    print_result(output.format, output.quiet, &status);
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
