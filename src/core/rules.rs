// Static alias rules
//
// Each rule set expands into one category of the alias table. Declaration
// order here is the order the table (and `list`) shows them in.

use super::alias_table::AliasCategory;

/// How one rule set turns its names into (alias, subcommand) pairs
pub enum RuleKind {
    /// `<alias_prefix><name>` -> `<namespace>:<name>`
    Prefixed {
        alias_prefix: &'static str,
        namespace: &'static str,
        names: &'static [(&'static str, &'static str)],
    },
    /// alias is the subcommand itself
    Passthrough(&'static [(&'static str, &'static str)]),
    /// (alias, subcommand, description) with no shared shape
    Named(&'static [(&'static str, &'static str, &'static str)]),
}

pub struct RuleSet {
    pub category: AliasCategory,
    pub kind: RuleKind,
}

impl RuleSet {
    /// Expand into (alias, subcommand, description) triples
    pub fn expand(&self) -> Vec<(String, String, &'static str)> {
        match &self.kind {
            RuleKind::Prefixed {
                alias_prefix,
                namespace,
                names,
            } => names
                .iter()
                .map(|(name, desc)| {
                    (
                        format!("{}{}", alias_prefix, name),
                        format!("{}:{}", namespace, name),
                        *desc,
                    )
                })
                .collect(),
            RuleKind::Passthrough(names) => names
                .iter()
                .map(|(name, desc)| (name.to_string(), name.to_string(), *desc))
                .collect(),
            RuleKind::Named(pairs) => pairs
                .iter()
                .map(|(alias, sub, desc)| (alias.to_string(), sub.to_string(), *desc))
                .collect(),
        }
    }
}

const MAKE_NAMES: &[(&str, &str)] = &[
    ("model", "Create a new Eloquent model class"),
    ("controller", "Create a new controller class"),
    ("view", "Create a new view"),
    ("middleware", "Create a new middleware class"),
    ("provider", "Create a new service provider class"),
    ("command", "Create a new Artisan command"),
    ("event", "Create a new event class"),
    ("listener", "Create a new event listener class"),
    ("mail", "Create a new email class"),
    ("notification", "Create a new notification class"),
    ("policy", "Create a new policy class"),
    ("request", "Create a new form request class"),
    ("resource", "Create a new API resource"),
    ("rule", "Create a new validation rule"),
    ("seeder", "Create a new seeder class"),
    ("service", "Create a new service class"),
    ("test", "Create a new test class"),
    ("job", "Create a new job class"),
    ("channel", "Create a new broadcast channel class"),
    ("console", "Create a new console command"),
    ("exception", "Create a new custom exception class"),
    ("factory", "Create a new model factory"),
    ("guard", "Create a new authentication guard"),
    ("migration", "Create a new migration file"),
    ("observer", "Create a new observer class"),
];

const DIRECT_NAMES: &[(&str, &str)] = &[
    ("migrate", "Run the database migrations"),
    ("down", "Put the application into maintenance mode"),
    ("up", "Bring the application out of maintenance mode"),
    ("serve", "Serve the application on the PHP development server"),
    ("optimize", "Cache framework bootstrap, configuration, and metadata"),
    ("cache:clear", "Flush the application cache"),
    ("config:cache", "Create a cache file for faster configuration loading"),
    ("config:clear", "Remove the configuration cache file"),
    ("config:show", "Display all of the values for a given configuration file"),
    ("route:cache", "Create a route cache file for faster route registration"),
    ("route:clear", "Remove the route cache file"),
    ("view:cache", "Compile all of the application's Blade templates"),
    ("view:clear", "Clear all compiled view files"),
    ("event:cache", "Discover and cache the application's events and listeners"),
    ("event:clear", "Clear all cached events and listeners"),
    ("queue:work", "Start processing jobs on the queue as a daemon"),
    ("queue:listen", "Listen to a given queue"),
    ("queue:restart", "Restart queue worker daemons after their current job"),
    ("queue:retry", "Retry a failed queue job"),
    ("queue:failed", "List all of the failed queue jobs"),
    ("queue:flush", "Flush all of the failed queue jobs"),
    ("queue:clear", "Delete all of the jobs from the specified queue"),
    ("schedule:run", "Run the scheduled commands"),
    ("schedule:work", "Start the schedule worker"),
    ("schedule:list", "List all scheduled tasks"),
    ("schedule:test", "Run a scheduled command"),
    ("schedule:interrupt", "Interrupt the current schedule run"),
    ("vendor:publish", "Publish any publishable assets from vendor packages"),
    ("list", "List all Artisan commands"),
];

const DB_NAMES: &[(&str, &str)] = &[
    ("seed", "Seed the database with records"),
    ("wipe", "Drop all tables, views, and types"),
    ("show", "Display information about the given database"),
    ("table", "Display information about the given database table"),
    ("monitor", "Monitor the number of connections on the specified database"),
];

const MIGRATE_NAMES: &[(&str, &str)] = &[
    ("fresh", "Drop all tables and re-run all migrations"),
    ("install", "Create the migration repository"),
    ("refresh", "Reset and re-run all migrations"),
    ("reset", "Rollback all database migrations"),
    ("rollback", "Rollback the last database migration"),
    ("status", "Show the status of each migration"),
];

const ENVIRONMENT_NAMES: &[(&str, &str, &str)] = &[
    ("envdecrypt", "env:decrypt", "Decrypt an environment file"),
    ("envencrypt", "env:encrypt", "Encrypt an environment file"),
    ("keygen", "key:generate", "Set the application key"),
    ("storagelink", "storage:link", "Create the symbolic links for public storage"),
];

const MIXED_NAMES: &[(&str, &str, &str)] = &[
    ("routes", "route:list", "List all registered routes"),
    ("tinker", "tinker", "Interact with your application"),
    ("about", "about", "Display basic information about your application"),
    ("optclear", "optimize:clear", "Remove the cached bootstrap files"),
    ("schemadump", "schema:dump", "Dump the given database schema"),
    ("stubs", "stub:publish", "Publish all stubs that are available for customization"),
    (
        "langpublish",
        "lang:publish",
        "Publish all language files that are available for customization",
    ),
];

/// Every rule set, in table order
pub const RULE_SETS: &[RuleSet] = &[
    RuleSet {
        category: AliasCategory::MakeCommands,
        kind: RuleKind::Prefixed {
            alias_prefix: "mk",
            namespace: "make",
            names: MAKE_NAMES,
        },
    },
    RuleSet {
        category: AliasCategory::DirectCommands,
        kind: RuleKind::Passthrough(DIRECT_NAMES),
    },
    RuleSet {
        category: AliasCategory::DatabaseCommands,
        kind: RuleKind::Prefixed {
            alias_prefix: "db",
            namespace: "db",
            names: DB_NAMES,
        },
    },
    RuleSet {
        category: AliasCategory::MigrationCommands,
        kind: RuleKind::Prefixed {
            alias_prefix: "",
            namespace: "migrate",
            names: MIGRATE_NAMES,
        },
    },
    RuleSet {
        category: AliasCategory::EnvironmentCommands,
        kind: RuleKind::Named(ENVIRONMENT_NAMES),
    },
    RuleSet {
        category: AliasCategory::MixedCommands,
        kind: RuleKind::Named(MIXED_NAMES),
    },
];
