mod products_tests;
