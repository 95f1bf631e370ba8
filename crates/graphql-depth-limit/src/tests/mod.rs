mod ignore_policy_tests;
mod utils;
