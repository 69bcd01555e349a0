//! End-to-end tests that write structure files to disk and read them back.
