use fuzz_ab::error::AppResult;

fn main() -> AppResult<()> {
    fuzz_ab::entry::run()
}
