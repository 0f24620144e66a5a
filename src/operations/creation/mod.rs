mod generate_test_data;

pub use generate_test_data::GenerateTestData;
