fn main() {
    #[cfg(feature = "csr")]
    site::mount();
}
