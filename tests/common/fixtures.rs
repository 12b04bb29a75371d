//! Reusable context-document fixtures.

/// First-generation flat context with all required groups present.
pub const FLAT_CONTEXT: &str = r#"{
    "tags": {
        "Owner": "contact-ops",
        "Environment": "dev",
        "GitHubUsername": "octocat"
    },
    "details": {
        "FunctionName": "command-center",
        "description": "Outbound contact dispatcher"
    },
    "vpc": {
        "vpc": "vpc-0a1b2c3d",
        "subnet": ["subnet-111", "subnet-222"]
    },
    "iamRole": {
        "roleName": "command-center-lambda",
        "description": "Execution role for the command center function"
    },
    "image": {
        "repositoryArn": "arn:aws:ecr:us-east-1:123456789012:repository/command-center",
        "tag": "1.4.0"
    },
    "connect": ["arn:aws:connect:us-east-1:123456789012:instance/abc"],
    "dynamoDB": [],
    "s3": ["arn:aws:s3:::contact-data"]
}"#;

/// Flat context with the function-detail group absent.
pub const FLAT_CONTEXT_MISSING_DETAILS: &str = r#"{
    "tags": {
        "Owner": "contact-ops",
        "Environment": "dev"
    },
    "iamRole": {
        "roleName": "command-center-lambda"
    },
    "image": {
        "repositoryArn": "arn:aws:ecr:us-east-1:123456789012:repository/command-center",
        "tag": "1.4.0"
    },
    "connect": [],
    "dynamoDB": [],
    "s3": []
}"#;

/// Flat context with a misspelled group name.
pub const FLAT_CONTEXT_TYPO: &str = r#"{
    "tags": {
        "Owner": "contact-ops",
        "Environment": "dev"
    },
    "detials": {
        "FunctionName": "command-center"
    },
    "details": {
        "FunctionName": "command-center"
    },
    "iamRole": {
        "roleName": "command-center-lambda"
    },
    "image": {
        "repositoryArn": "arn:aws:ecr:us-east-1:123456789012:repository/command-center",
        "tag": "1.4.0"
    },
    "connect": [],
    "dynamoDB": [],
    "s3": []
}"#;

/// Second-generation context with one profile and two regions.
pub const PROFILE_CONTEXT: &str = r#"{
    "profiles": {
        "prod": {
            "image": {
                "repositoryArn": "arn:aws:ecr:us-east-1:123456789012:repository/command-center",
                "tag": "2.0.1"
            },
            "tags": {
                "Owner": "contact-ops",
                "Environment": "prod"
            },
            "regions": {
                "us-east-1": {
                    "details": {
                        "FunctionName": "command-center",
                        "description": "Outbound contact dispatcher"
                    },
                    "vpc": {
                        "vpc": "vpc-0east",
                        "subnet": ["subnet-east-1", "subnet-east-2"]
                    },
                    "resources": {
                        "connect": ["arn:aws:connect:us-east-1:123456789012:instance/abc"],
                        "dynamoDB": ["arn:aws:dynamodb:us-east-1:123456789012:table/contacts"],
                        "s3": ["arn:aws:s3:::contact-data-east"]
                    }
                },
                "eu-west-1": {
                    "details": {
                        "FunctionName": "command-center",
                        "description": "Outbound contact dispatcher"
                    },
                    "vpc": {
                        "vpc": "vpc-0west",
                        "subnet": ["subnet-west-1"]
                    },
                    "resources": {
                        "connect": [],
                        "dynamoDB": [],
                        "s3": ["arn:aws:s3:::contact-data-west"]
                    },
                    "tags": {
                        "Environment": "prod-eu"
                    }
                }
            }
        }
    }
}"#;
