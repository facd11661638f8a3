use std::process::ExitCode;

use augment_lib::Augmentation;

fn main() -> ExitCode {
    augment_cli::run(
        "augment-nifi-security",
        "Add bearer authentication to a NiFi OpenAPI document",
        Augmentation::NifiSecurity,
    )
}
