use std::process::ExitCode;

use augment_lib::Augmentation;

fn main() -> ExitCode {
    augment_cli::run(
        "normalize-enums",
        "Split comma-joined enum values and remove duplicates",
        Augmentation::NormalizeEnums,
    )
}
