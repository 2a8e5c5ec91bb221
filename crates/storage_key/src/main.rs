fn main() -> anyhow::Result<()> {
    env_logger::init();
    judge_io::run(storage_key::solve)
}
