mod response_envelope_tests;
