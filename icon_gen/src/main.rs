mod generate;

use generate::GenerateError;

fn main() -> Result<(), GenerateError> {
    lib_png::init_logging();

    generate::run()
}
