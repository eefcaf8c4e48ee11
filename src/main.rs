fn main() {
    #[cfg(feature = "csr")]
    todo_app::mount();
}
