mod adapters;
mod commands;
mod terminal;

use adapters::export::{ConsoleEcho, FileExport};
use adapters::inventory_file::JsonInventoryFile;
use commands::CommandLine;
use ltmgen_core::Generator;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);
    print::banner();

    let cfg = commands.to_run_config()?;
    let export = commands.export_path();

    print::header("locating inventory");
    let source = JsonInventoryFile::locate(&commands.file)?;

    print::header("generating script");
    let mut generator =
        Generator::new(Box::new(source)).with_sink(Box::new(FileExport::new(&export)));
    if commands.print {
        generator = generator.with_sink(Box::new(ConsoleEcho::stdout()));
    }

    let report = generator.run(&cfg)?;

    print::summary(&report, &export);
    print::end_of_program();
    Ok(())
}
