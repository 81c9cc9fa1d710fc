fn main() {
    ipex::app::cli::run();
}
