fn main() {
    // Exports the ESP-IDF build environment to dependents when compiling for
    // the espidf target; a no-op for host builds and tests.
    embuild::espidf::sysenv::output();
}
