fn main() -> anyhow::Result<()> {
    picoclaw_lib::main()
}
