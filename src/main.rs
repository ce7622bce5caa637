use structopt::StructOpt;

fn main() {
    let cli_args = feedly_cli::cli::FeedlyArgs::from_args();
    feedly_cli::logging::init_tracing(cli_args.verbosity());

    match run(cli_args) {
        Ok(output) => {
            for line in output {
                println!("{}", line);
            }
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn run(cli_args: feedly_cli::cli::FeedlyArgs) -> anyhow::Result<Vec<String>> {
    let cfg = cli_args.load_config()?;
    let cmd = cli_args.to_cmd()?;
    cmd.execute_console(&cfg)
}
