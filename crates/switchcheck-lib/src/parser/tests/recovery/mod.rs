mod fuel_tests;
mod recovery_tests;
