use std::process::ExitCode;

use augment_lib::Augmentation;

fn main() -> ExitCode {
    augment_cli::run(
        "nifi-processor-state-enum",
        "Widen ProcessorDTO.state to the values of physicalState",
        Augmentation::ProcessorStateEnum,
    )
}
