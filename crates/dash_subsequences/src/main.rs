fn main() -> anyhow::Result<()> {
    env_logger::init();
    judge_io::run(dash_subsequences::solve)
}
