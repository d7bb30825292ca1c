fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(shelf_web::App);
}
