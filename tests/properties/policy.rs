use proptest::prelude::*;

use stackplan::{statements_for, Effect, PolicyDomain};

fn any_domain() -> impl Strategy<Value = PolicyDomain> {
    prop_oneof![
        Just(PolicyDomain::Connect),
        Just(PolicyDomain::DynamoDb),
        Just(PolicyDomain::S3),
    ]
}

fn any_resources() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("arn:[a-z0-9:/_-]{0,24}", 0..8)
}

proptest! {
    #[test]
    fn builder_returns_one_allow_statement(domain in any_domain(), resources in any_resources()) {
        let statements = statements_for(domain, &resources);

        prop_assert_eq!(statements.len(), 1);
        prop_assert_eq!(statements[0].effect, Effect::Allow);
    }

    #[test]
    fn builder_passes_resources_through(domain in any_domain(), resources in any_resources()) {
        let statements = statements_for(domain, &resources);

        prop_assert_eq!(&statements[0].resources, &resources);
    }

    #[test]
    fn builder_actions_are_the_fixed_table(domain in any_domain(), resources in any_resources()) {
        let statements = statements_for(domain, &resources);

        prop_assert_eq!(&statements[0].actions, domain.actions());
    }

    #[test]
    fn builder_is_deterministic(domain in any_domain(), resources in any_resources()) {
        prop_assert_eq!(
            statements_for(domain, &resources),
            statements_for(domain, &resources)
        );
    }
}
