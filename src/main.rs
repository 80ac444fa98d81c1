fn main() {
    plugkit::app::startup::startup();
}
