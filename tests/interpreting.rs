#[cfg(test)]
mod verify {
    use modl::interpret::{self, Container, InterpretError, RuntimeContext, ValueType};
    use modl::lexing::{tokenize, Category, Token};
    use modl::matching::FormationKind;

    fn run(source: &str) -> Result<Vec<String>, InterpretError> {
        let tokens = tokenize(source).unwrap();
        let mut context = RuntimeContext::new();
        interpret::run(&tokens, &mut context)?;
        Ok(context.lines().to_vec())
    }

    #[test]
    fn declare_assign_and_print() {
        let lines = run("x : real;\nx := 3.5\noutput ( x hello )\nend").unwrap();
        assert_eq!(lines, vec!["0_11\\shello".to_string()]);
    }

    #[test]
    fn negative_values_render_with_sign_bit() {
        let lines = run("x : real;\nx := -3.5\noutput ( x )\nend").unwrap();
        assert_eq!(lines, vec!["1_11".to_string()]);
    }

    #[test]
    fn integers_render_in_binary() {
        let lines = run("n : integer;\nn := 5\noutput ( n )\nend").unwrap();
        assert_eq!(lines, vec!["0_101".to_string()]);
    }

    #[test]
    fn radix_suffixed_assignment() {
        let lines = run("n : integer;\nn := 1Fh\noutput ( n )\nend").unwrap();
        assert_eq!(lines, vec!["0_11111".to_string()]);
    }

    #[test]
    fn booleans_render_as_words() {
        let lines = run("flag : boolean;\nflag := true\noutput ( flag )\nend").unwrap();
        assert_eq!(lines, vec!["true".to_string()]);
    }

    #[test]
    fn unassigned_variables_print_their_own_name() {
        let lines = run("x : integer;\noutput ( x )\nend").unwrap();
        assert_eq!(lines, vec!["x".to_string()]);
    }

    #[test]
    fn literals_pass_through_output_verbatim() {
        let lines = run("output ( 5 hello )\nend").unwrap();
        assert_eq!(lines, vec!["5\\shello".to_string()]);
    }

    #[test]
    fn redeclaration_points_at_the_second_occurrence() {
        let result = run("x, x : integer;");
        assert_eq!(
            result,
            Err(InterpretError::AlreadyDeclared(3, "x".to_string()))
        );
    }

    #[test]
    fn assignment_requires_a_declaration() {
        let result = run("y := 5");
        assert_eq!(result, Err(InterpretError::NotDeclared(0, "y".to_string())));
    }

    #[test]
    fn literals_must_parse_into_the_declared_type() {
        let source = "x : integer;\nx := 3.5";
        let result = run(source);
        assert_eq!(
            result,
            Err(InterpretError::MalformedLiteral(
                source.find("3.5").unwrap(),
                "3.5".to_string(),
                ValueType::Integer,
            ))
        );
    }

    #[test]
    fn assigning_a_variable_to_a_variable_is_not_supported() {
        let result = run("x, y : integer;\nx := y");
        assert_eq!(
            result,
            Err(InterpretError::Expected(
                "x, y : integer;\n".len(),
                "a literal value"
            ))
        );
    }

    #[test]
    fn unrecognized_window_is_a_syntax_error() {
        let source = "x : integer;\n; nonsense";
        let result = run(source);

        // The declaration consumes its own terminating ';'; the stray one
        // on the second line starts a window no shape applies to.
        assert_eq!(result, Err(InterpretError::UnknownStatement(13)));
    }

    #[test]
    fn nothing_after_the_failing_statement_runs() {
        let result = run("y := 5\noutput ( done )\nend");
        assert!(result.is_err());
    }

    #[test]
    fn end_stops_the_run() {
        // Tokens after the end-of-program marker are never matched, so
        // the stray delimiters there cannot fail the run.
        let lines = run("output ( done )\nend\n; ; ;").unwrap();
        assert_eq!(lines, vec!["done".to_string()]);
    }

    #[test]
    fn branches_and_loops_are_recognized_but_inert() {
        let lines = run("x : integer;\nif x == 5 then output ( x ) end_if\nend").unwrap();
        assert!(lines.is_empty());

        let lines = run("while x < 5 end_while\nend").unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn comments_have_no_effect() {
        let lines = run("{ just commentary }\noutput ( ok )\nend").unwrap();
        assert_eq!(lines, vec!["ok".to_string()]);
    }

    #[test]
    fn declared_types_outside_the_vocabulary_are_rejected() {
        // The tokenizer only ever classifies the three legal type names
        // as a type token, so this guard is exercised with a hand-built
        // stream.
        let tokens = vec![
            Token::new(Category::Identifier, "x", 0),
            Token::new(Category::Delimiter, ":", 2),
            Token::new(Category::TypeDef, "complex", 4),
            Token::new(Category::EndStatement, ";", 11),
        ];
        let mut context = RuntimeContext::new();
        let result = interpret::run(&tokens, &mut context);
        assert_eq!(
            result,
            Err(InterpretError::InvalidType(4, "complex".to_string()))
        );
    }

    #[test]
    fn check_reports_shapes_without_side_effects() {
        let source = "{ note }\nx : real;\nx := 1.5\noutput ( x )\nend";
        let tokens = tokenize(source).unwrap();
        let kinds = interpret::check(&tokens).unwrap();
        assert_eq!(
            kinds,
            vec![
                FormationKind::Comment,
                FormationKind::VarDef,
                FormationKind::VarAssign,
                FormationKind::Output,
                FormationKind::End,
            ]
        );
    }

    #[test]
    fn containers_keep_their_declared_type() {
        let tokens = tokenize("x : real;\nx := 2.5\nx := -0.5\nend").unwrap();
        let mut context = RuntimeContext::new();
        interpret::run(&tokens, &mut context).unwrap();

        let container = context.variables().get("x").unwrap();
        assert_eq!(container.value_type(), ValueType::Real);
        assert_eq!(container, &Container::Real(Some(-0.5)));
        assert_eq!(container.render(), Some("1_0".to_string()));
    }
}
