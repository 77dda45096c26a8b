//! Test suite for EchoSignal
//!
//! This module organizes all tests
