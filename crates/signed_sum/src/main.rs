fn main() -> anyhow::Result<()> {
    env_logger::init();
    judge_io::run(signed_sum::solve)
}
