fn main() -> miette::Result<()> {
    instrsync::cli::run()
}
