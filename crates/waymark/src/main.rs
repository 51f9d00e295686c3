fn main() -> miette::Result<()> {
    waymark::start_waymark()
}
