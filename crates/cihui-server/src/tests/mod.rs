mod inputs_tests;
