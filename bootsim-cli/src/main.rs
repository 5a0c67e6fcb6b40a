fn main() -> anyhow::Result<()> {
    bootsim_cli::run()
}
