use proptest::prelude::*;

use stackplan::{assemble, ImageRef, ResolvedContext, ResolvedResources, TagSet};

fn any_resources() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("arn:[a-z0-9:/_-]{0,24}", 0..5)
}

fn resolved(connect: Vec<String>, dynamo_db: Vec<String>, s3: Vec<String>) -> ResolvedContext {
    let mut tags = TagSet::new();
    tags.insert("Owner", "ops");
    tags.insert("Environment", "test");

    ResolvedContext {
        role_name: "role-under-test".to_string(),
        role_description: None,
        function_name: "function-under-test".to_string(),
        function_description: None,
        image: ImageRef {
            repository_arn: "arn:aws:ecr:us-east-1:123456789012:repository/test".to_string(),
            tag: "latest".to_string(),
        },
        network: None,
        tags,
        resources: ResolvedResources {
            connect,
            dynamo_db,
            s3,
        },
    }
}

proptest! {
    #[test]
    fn assembly_has_one_statement_per_domain(
        connect in any_resources(),
        dynamo_db in any_resources(),
        s3 in any_resources(),
    ) {
        let context = resolved(connect.clone(), dynamo_db.clone(), s3.clone());
        let assembly = assemble(&context).unwrap();

        prop_assert_eq!(assembly.role.statements.len(), 3);
        prop_assert_eq!(&assembly.role.statements[0].resources, &connect);
        prop_assert_eq!(&assembly.role.statements[1].resources, &dynamo_db);
        prop_assert_eq!(&assembly.role.statements[2].resources, &s3);
    }

    #[test]
    fn assembly_is_deterministic(
        connect in any_resources(),
        dynamo_db in any_resources(),
        s3 in any_resources(),
    ) {
        let context = resolved(connect, dynamo_db, s3);

        prop_assert_eq!(assemble(&context).unwrap(), assemble(&context).unwrap());
    }

    #[test]
    fn function_always_references_the_assembled_role(
        connect in any_resources(),
    ) {
        let context = resolved(connect, Vec::new(), Vec::new());
        let assembly = assemble(&context).unwrap();

        prop_assert_eq!(
            assembly.function.role,
            assembly.role.identity(&assembly.environment)
        );
    }
}
