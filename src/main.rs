fn main() -> anyhow::Result<()> {
    ideas::run()?;
    Ok(())
}
