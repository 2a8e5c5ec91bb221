fn main() -> anyhow::Result<()> {
    env_logger::init();
    judge_io::run(cyclic_shift::solve)
}
