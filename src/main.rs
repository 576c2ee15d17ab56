fn main() {
    casekit::cli::run();
}
