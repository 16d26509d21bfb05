use votequeue::cli::run;

fn main() -> anyhow::Result<()> {
    run()
}
