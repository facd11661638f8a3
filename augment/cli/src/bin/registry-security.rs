use std::process::ExitCode;

use augment_lib::Augmentation;

fn main() -> ExitCode {
    augment_cli::run(
        "registry-security",
        "Add bearer and basic authentication to a NiFi Registry OpenAPI document",
        Augmentation::RegistrySecurity,
    )
}
