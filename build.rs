fn main() {
    // ESP-IDF sysenv propagation is only needed for the device binary;
    // host-target builds (tests) skip it.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
