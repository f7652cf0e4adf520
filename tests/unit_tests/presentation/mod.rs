mod input_test;
