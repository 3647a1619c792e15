use std::path::Path;

use postman_client::resources::SpecFilter;
use postman_core::types::{CreateSpec, SpecFileInput};
use postman_core::{parse_definition_str, DefinitionFormat};

use crate::commands::SpecsAction;
use crate::exit_codes;
use crate::id_store::IdStore;
use crate::output::{print_error, print_result};
use crate::{IdStoreArgs, OutputArgs};

pub async fn specs_cmd(action: SpecsAction, output: OutputArgs) -> i32 {
    let client = match super::client_from_env(output.format, output.quiet) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match action {
        SpecsAction::List { workspace_id } => {
            let filter = SpecFilter {
                workspace_id,
                ..SpecFilter::default()
            };
            match client.get_specs(&filter).await {
                Ok(specs) => {
                    print_result(output.format, output.quiet, &specs);
                    exit_codes::SUCCESS
                }
                Err(e) => {
                    print_error(output.format, output.quiet, &e.to_string());
                    exit_codes::API_ERROR
                }
            }
        }
        SpecsAction::Get { spec_id } => match client.get_spec(&spec_id).await {
            Ok(spec) => {
                print_result(output.format, output.quiet, &spec);
                exit_codes::SUCCESS
            }
            Err(e) => {
                print_error(output.format, output.quiet, &e.to_string());
                exit_codes::API_ERROR
            }
        },
        SpecsAction::Create {
            file,
            workspace_id,
            name,
            spec_type,
            ids,
        } => create_spec(&client, &file, &workspace_id, &name, &spec_type, ids, output).await,
    }
}

async fn create_spec(
    client: &postman_client::Client,
    file: &Path,
    workspace_id: &str,
    name: &str,
    spec_type: &str,
    ids: IdStoreArgs,
    output: OutputArgs,
) -> i32 {
    let content = match std::fs::read_to_string(file) {
        Ok(v) => v,
        Err(e) => {
            print_error(
                output.format,
                output.quiet,
                &format!("failed to read {}: {e}", file.display()),
            );
            return exit_codes::RUNTIME_ERROR;
        }
    };

    // Parse locally first so a broken definition fails before any request.
    if let Err(e) = parse_definition_str(&content, DefinitionFormat::Auto) {
        print_error(
            output.format,
            output.quiet,
            &format!("{} is not a valid definition: {e}", file.display()),
        );
        return exit_codes::VALIDATION_FAILED;
    }

    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index.yaml".to_string());
    let input = CreateSpec {
        name: name.to_string(),
        r#type: spec_type.to_string(),
        files: vec![SpecFileInput {
            path: file_name,
            content,
        }],
    };

    match client.create_spec(workspace_id, &input).await {
        Ok(spec) => {
            let mut store = IdStore::load(&ids.ids_file).unwrap_or_default();
            store.remember("spec", &spec.id);
            if let Err(e) = store.save(&ids.ids_file) {
                print_error(
                    output.format,
                    output.quiet,
                    &format!("failed to save {}: {e}", ids.ids_file.display()),
                );
            }
            print_result(output.format, output.quiet, &spec);
            exit_codes::SUCCESS
        }
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            exit_codes::API_ERROR
        }
    }
}
