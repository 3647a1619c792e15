use crate::exit_codes;
use crate::output::{print_error, print_result};
use crate::OutputArgs;

pub async fn whoami_cmd(output: OutputArgs) -> i32 {
    let client = match super::client_from_env(output.format, output.quiet) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match client.me().await {
        Ok(me) => {
            print_result(output.format, output.quiet, &me);
            exit_codes::SUCCESS
        }
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            exit_codes::API_ERROR
        }
    }
}
