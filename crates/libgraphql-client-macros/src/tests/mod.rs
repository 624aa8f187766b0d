mod enum_expansion_tests;
