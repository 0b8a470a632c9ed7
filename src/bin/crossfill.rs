fn main() -> anyhow::Result<()> {
    crossfill::runner::run()
}
