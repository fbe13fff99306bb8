fn main() {
    dgraph_helper::app::cli::run();
}
