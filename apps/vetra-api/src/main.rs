use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = vetra_api::Args::parse();
	vetra_api::run(args).await
}
