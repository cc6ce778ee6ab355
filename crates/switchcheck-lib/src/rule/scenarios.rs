//! Shared sources: a statement switch, the same with a block default, and an
//! expression switch, each missing `Cooking` and `Cooked`.

use indoc::indoc;

pub const STATEMENT: &str = indoc! {r#"
    using System;

    namespace ExhaustiveSwitchOnEnums
    {
        public enum Status
        {
            Accepted = 1,
            Cooking = 2,
            Cooked = 3,
        }

        public static class Program
        {
            public static void Main(string[] args)
            {
            }

            public static void Method(Status status)
            {
                switch (status)
                {
                    case Status.Accepted:
                        return;
                    default:
                        throw new ArgumentOutOfRangeException(nameof(status), status, null);
                }
            }
        }
    }
"#};

pub const STATEMENT_FIXED: &str = indoc! {r#"
    using System;

    namespace ExhaustiveSwitchOnEnums
    {
        public enum Status
        {
            Accepted = 1,
            Cooking = 2,
            Cooked = 3,
        }

        public static class Program
        {
            public static void Main(string[] args)
            {
            }

            public static void Method(Status status)
            {
                switch (status)
                {
                    case Status.Accepted:
                        return;
                    case Status.Cooking:
                        throw new NotImplementedException();
                    case Status.Cooked:
                        throw new NotImplementedException();
                    default:
                        throw new ArgumentOutOfRangeException(nameof(status), status, null);
                }
            }
        }
    }
"#};

pub const BLOCK_DEFAULT: &str = indoc! {r#"
    using System;

    namespace ExhaustiveSwitchOnEnums
    {
        public enum Status
        {
            Accepted = 1,
            Cooking = 2,
            Cooked = 3,
        }

        public static class Program
        {
            public static void Main(string[] args)
            {
            }

            public static void Method(Status status)
            {
                switch (status)
                {
                    case Status.Accepted:
                        return;
                    default:
                    {
                        throw new ArgumentOutOfRangeException(nameof(status), status, null);
                    }
                }
            }
        }
    }
"#};

pub const BLOCK_DEFAULT_FIXED: &str = indoc! {r#"
    using System;

    namespace ExhaustiveSwitchOnEnums
    {
        public enum Status
        {
            Accepted = 1,
            Cooking = 2,
            Cooked = 3,
        }

        public static class Program
        {
            public static void Main(string[] args)
            {
            }

            public static void Method(Status status)
            {
                switch (status)
                {
                    case Status.Accepted:
                        return;
                    case Status.Cooking:
                        throw new NotImplementedException();
                    case Status.Cooked:
                        throw new NotImplementedException();
                    default:
                    {
                        throw new ArgumentOutOfRangeException(nameof(status), status, null);
                    }
                }
            }
        }
    }
"#};

pub const EXPRESSION: &str = indoc! {r#"
    using System;

    namespace ExhaustiveSwitchOnEnums
    {
        public enum Status
        {
            Accepted = 1,
            Cooking = 2,
            Cooked = 3,
        }

        public static class Program
        {
            public static void Main(string[] args)
            {
            }

            public static string Method(Status status)
            {
                return status switch
                {
                    Status.Accepted => "",
                    _ => throw new ArgumentOutOfRangeException(nameof(status), status, null)
                };
            }
        }
    }
"#};

pub const EXPRESSION_FIXED: &str = indoc! {r#"
    using System;

    namespace ExhaustiveSwitchOnEnums
    {
        public enum Status
        {
            Accepted = 1,
            Cooking = 2,
            Cooked = 3,
        }

        public static class Program
        {
            public static void Main(string[] args)
            {
            }

            public static string Method(Status status)
            {
                return status switch
                {
                    Status.Accepted => "",
                    Status.Cooking => throw new NotImplementedException(),
                    Status.Cooked => throw new NotImplementedException(),
                    _ => throw new ArgumentOutOfRangeException(nameof(status), status, null)
                };
            }
        }
    }
"#};

/// Wraps a method body in an enum and class declaration.
pub fn in_method(body: &str) -> String {
    format!(
        "enum Status {{ Accepted, Cooking, Cooked }}\n\
         enum Door {{ Accepted, Cooking, Cooked }}\n\
         class Kitchen {{\n    \
             Status Current;\n    \
             object Describe(Status status, Door door, int count) {{\n\
         {body}\n    \
             }}\n\
         }}\n"
    )
}
