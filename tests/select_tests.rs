use serde_json::Value;
use sqltree_json::ast::{
    Expr, JoinKind, OperatorKind, OrderDirection, SelectStatement, Statement, TableRef,
};
use sqltree_json::render;

fn json_of(stmt: SelectStatement, pretty: bool) -> Value {
    let text = render(&Statement::Select(stmt), pretty).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn has_key(value: &Value, key: &str) -> bool {
    value.as_object().map(|o| o.contains_key(key)).unwrap_or(false)
}

// SELECT * FROM students;
#[test]
fn test_select_star() {
    let stmt = SelectStatement::new(vec![Expr::star()]).from(TableRef::named("students"));
    let root = json_of(stmt, false);

    assert!(has_key(&root, "selectList"));
    assert!(has_key(&root, "fromTable"));
    assert!(!has_key(&root, "whereClause"));
    assert!(!has_key(&root, "groupBy"));
    assert!(!has_key(&root, "order"));
    assert!(!has_key(&root, "limit"));

    assert_eq!(root["selectList"].as_array().unwrap().len(), 1);
    assert_eq!(root["selectList"][0]["type"], "kExprStar");
    assert_eq!(root["selectList"][0]["exp"], "*");
    assert_eq!(root["fromTable"]["type"], "kTableName");
    assert_eq!(root["fromTable"]["name"], "students");
    assert!(!has_key(&root["fromTable"], "schema"));
}

// SELECT a, MAX(b), CUSTOM(c, F(un)) FROM students;
#[test]
fn test_select_nested_functions() {
    let stmt = SelectStatement::new(vec![
        Expr::column("a"),
        Expr::function("MAX", vec![Expr::column("b")]),
        Expr::function(
            "CUSTOM",
            vec![Expr::column("c"), Expr::function("F", vec![Expr::column("un")])],
        ),
    ])
    .from(TableRef::named("students"));
    let root = json_of(stmt, false);

    let list = &root["selectList"];
    assert_eq!(list.as_array().unwrap().len(), 3);

    assert_eq!(list[0]["type"], "kExprColumnRef");
    assert_eq!(list[0]["name"], "a");

    assert_eq!(list[1]["type"], "kExprFunctionRef");
    assert_eq!(list[1]["name"], "MAX");
    assert_eq!(list[1]["exprList"].as_array().unwrap().len(), 1);
    assert_eq!(list[1]["exprList"][0]["name"], "b");

    let custom = &list[2];
    assert_eq!(custom["name"], "CUSTOM");
    assert_eq!(custom["exprList"].as_array().unwrap().len(), 2);
    assert_eq!(custom["exprList"][0]["name"], "c");
    assert_eq!(custom["exprList"][1]["type"], "kExprFunctionRef");
    assert_eq!(custom["exprList"][1]["name"], "F");
    assert_eq!(custom["exprList"][1]["exprList"][0]["type"], "kExprColumnRef");
    assert_eq!(custom["exprList"][1]["exprList"][0]["name"], "un");
}

// SELECT city, AVG(grade) AS avg_grade FROM students GROUP BY city HAVING AVG(grade) < -2.0
#[test]
fn test_select_group_by_having() {
    let stmt = SelectStatement::new(vec![
        Expr::column("city"),
        Expr::function("AVG", vec![Expr::column("grade")]).with_alias("avg_grade"),
    ])
    .from(TableRef::named("students"))
    .group_by(
        vec![Expr::column("city")],
        Some(Expr::binary(
            OperatorKind::Less,
            Expr::function("AVG", vec![Expr::column("grade")]),
            Expr::float(-2.0),
        )),
    );
    let root = json_of(stmt, true);

    assert_eq!(root["selectDistinct"], false);
    assert_eq!(root["selectList"][1]["alias"], "avg_grade");

    let group = &root["groupBy"];
    assert_eq!(group["columns"].as_array().unwrap().len(), 1);

    let having = &group["having"];
    assert_eq!(having["type"], "kExprOperator");
    assert_eq!(having["opType"], "kOpLess");
    assert_eq!(having["expr"]["type"], "kExprFunctionRef");
    assert_eq!(having["expr2"]["type"], "kExprLiteralFloat");
    assert!(having["expr2"]["fval"].is_f64());
    assert_eq!(having["expr2"]["fval"].as_f64(), Some(-2.0));
    assert!(!has_key(having, "exprList"));
}

#[test]
fn test_group_by_without_having() {
    let stmt = SelectStatement::new(vec![Expr::column("city")])
        .from(TableRef::named("students"))
        .group_by(vec![Expr::column("city")], None);
    let root = json_of(stmt, false);

    assert!(has_key(&root, "groupBy"));
    assert!(!has_key(&root["groupBy"], "having"));
}

// SELECT DISTINCT grade, city FROM students;
#[test]
fn test_select_distinct() {
    let stmt = SelectStatement::new(vec![Expr::column("grade"), Expr::column("city")])
        .distinct()
        .from(TableRef::named("students"));
    let root = json_of(stmt, true);

    assert_eq!(root["selectDistinct"], true);
    assert!(!has_key(&root, "whereClause"));
}

// SELECT grade FROM some_schema.students;
#[test]
fn test_select_schema() {
    let stmt = SelectStatement::new(vec![Expr::column("grade")])
        .from(TableRef::qualified("some_schema", "students"));
    let root = json_of(stmt, true);

    assert_eq!(root["fromTable"]["schema"], "some_schema");
    assert_eq!(root["fromTable"]["name"], "students");
}

// SELECT city, COUNT(name), COUNT(DISTINCT grade) FROM students GROUP BY city;
#[test]
fn test_select_function_distinct_flags() {
    let stmt = SelectStatement::new(vec![
        Expr::column("city"),
        Expr::function("COUNT", vec![Expr::column("name")]),
        Expr::distinct_function("COUNT", vec![Expr::column("grade")]),
    ])
    .from(TableRef::named("students"))
    .group_by(vec![Expr::column("city")], None);
    let root = json_of(stmt, true);

    assert_eq!(root["selectDistinct"], false);
    assert_eq!(root["selectList"].as_array().unwrap().len(), 3);
    assert_eq!(root["selectList"][1]["distinct"], false);
    assert_eq!(root["selectList"][2]["distinct"], true);
}

// SELECT grade, city FROM students ORDER BY grade, city DESC;
#[test]
fn test_order_by() {
    let stmt = SelectStatement::new(vec![Expr::column("grade"), Expr::column("city")])
        .from(TableRef::named("students"))
        .order_by(Expr::column("grade"), OrderDirection::Asc)
        .order_by(Expr::column("city"), OrderDirection::Desc);
    let root = json_of(stmt, true);

    assert!(!has_key(&root, "whereClause"));
    let order = root["order"].as_array().unwrap();
    assert_eq!(order.len(), 2);

    // Order items are the expression document plus the direction flag
    assert_eq!(order[0]["type"], "kExprColumnRef");
    assert_eq!(order[0]["name"], "grade");
    assert_eq!(order[0]["ascending"], true);
    assert_eq!(order[1]["name"], "city");
    assert_eq!(order[1]["ascending"], false);
}

// SELECT grade, city FROM students WHERE grade BETWEEN -1 and c;
#[test]
fn test_where_between() {
    let stmt = SelectStatement::new(vec![Expr::column("grade"), Expr::column("city")])
        .from(TableRef::named("students"))
        .filter(Expr::between(Expr::column("grade"), Expr::int(-1), Expr::column("c")));
    let root = json_of(stmt, true);

    let cond = &root["whereClause"];
    assert_eq!(cond["type"], "kExprOperator");
    assert_eq!(cond["opType"], "kOpBetween");
    assert_eq!(cond["expr"]["type"], "kExprColumnRef");
    assert_eq!(cond["expr"]["name"], "grade");
    assert!(!has_key(cond, "expr2"));

    let bounds = cond["exprList"].as_array().unwrap();
    assert_eq!(bounds.len(), 2);
    assert_eq!(bounds[0]["type"], "kExprLiteralInt");
    assert_eq!(bounds[0]["ival"], -1);
    assert_eq!(bounds[1]["type"], "kExprColumnRef");
    assert_eq!(bounds[1]["name"], "c");
}

// SELECT * FROM t WHERE a = (SELECT MIN(v) FROM tt) AND EXISTS (SELECT * FROM test WHERE x < a);
#[test]
fn test_where_subqueries() {
    let min_v = SelectStatement::new(vec![Expr::function("MIN", vec![Expr::column("v")])])
        .from(TableRef::named("tt"));
    let exists = SelectStatement::new(vec![Expr::star()])
        .from(TableRef::named("test"))
        .filter(Expr::binary(OperatorKind::Less, Expr::column("x"), Expr::column("a")));

    let stmt = SelectStatement::new(vec![Expr::star()])
        .from(TableRef::named("t"))
        .filter(Expr::binary(
            OperatorKind::And,
            Expr::binary(OperatorKind::Equals, Expr::column("a"), Expr::subquery(min_v)),
            Expr::exists(exists),
        ));
    let root = json_of(stmt, true);

    let cond = &root["whereClause"];
    assert_eq!(cond["type"], "kExprOperator");
    assert_eq!(cond["opType"], "kOpAnd");

    let equals = &cond["expr"];
    assert_eq!(equals["opType"], "kOpEquals");
    assert_eq!(equals["expr"]["name"], "a");
    assert_eq!(equals["expr"]["type"], "kExprColumnRef");
    assert_eq!(equals["expr2"]["type"], "kExprSelect");
    assert_eq!(equals["expr2"]["select"]["fromTable"]["name"], "tt");

    let exists = &cond["expr2"];
    assert_eq!(exists["opType"], "kOpExists");
    assert!(!has_key(exists, "expr2"));
    assert_eq!(exists["expr"]["type"], "kExprSelect");
    assert_eq!(exists["expr"]["select"]["fromTable"]["name"], "test");
    assert_eq!(exists["expr"]["select"]["whereClause"]["opType"], "kOpLess");
}

// SELECT MAX(CASE WHEN a = 'foo' THEN x ELSE 0 END) FROM test;
#[test]
fn test_case_when_inside_function() {
    let case = Expr::case(
        Expr::binary(OperatorKind::Equals, Expr::column("a"), Expr::string("foo")),
        Expr::column("x"),
        Expr::int(0),
    );
    let stmt = SelectStatement::new(vec![Expr::function("MAX", vec![case])])
        .from(TableRef::named("test"));
    let root = json_of(stmt, true);

    let max = &root["selectList"][0];
    assert_eq!(max["type"], "kExprFunctionRef");
    assert_eq!(max["exprList"].as_array().unwrap().len(), 1);

    let case = &max["exprList"][0];
    assert_eq!(case["type"], "kExprOperator");
    assert_eq!(case["opType"], "kOpCase");
    assert_eq!(case["expr"]["type"], "kExprOperator");
    assert_eq!(case["expr"]["opType"], "kOpEquals");
    assert_eq!(case["expr"]["expr2"]["type"], "kExprLiteralString");
    assert_eq!(case["expr"]["expr2"]["name"], "foo");
    assert_eq!(case["exprList"].as_array().unwrap().len(), 2);
    assert!(!has_key(case, "expr2"));
}

// SELECT a FROM t UNION SELECT b FROM u
#[test]
fn test_union_chain() {
    let stmt = SelectStatement::new(vec![Expr::column("a")])
        .from(TableRef::named("t"))
        .union(
            SelectStatement::new(vec![Expr::column("b")])
                .from(TableRef::named("u"))
                .union(SelectStatement::new(vec![Expr::column("c")]).from(TableRef::named("v"))),
        );
    let root = json_of(stmt, false);

    assert_eq!(root["unionSelect"]["selectList"][0]["name"], "b");
    assert_eq!(root["unionSelect"]["fromTable"]["name"], "u");
    assert_eq!(root["unionSelect"]["unionSelect"]["fromTable"]["name"], "v");
    assert!(!has_key(&root["unionSelect"]["unionSelect"], "unionSelect"));
}

// SELECT a FROM t LIMIT 10 / LIMIT 10 OFFSET 20
#[test]
fn test_limit_and_offset() {
    let plain = json_of(
        SelectStatement::new(vec![Expr::column("a")])
            .from(TableRef::named("t"))
            .limit(10, None),
        false,
    );
    assert_eq!(plain["limit"], 10);
    assert!(!has_key(&plain, "offset"));

    let paged = json_of(
        SelectStatement::new(vec![Expr::column("a")])
            .from(TableRef::named("t"))
            .limit(10, Some(20)),
        false,
    );
    assert_eq!(paged["limit"], 10);
    assert_eq!(paged["offset"], 20);
}

#[test]
fn test_select_without_from() {
    // SELECT 1
    let root = json_of(SelectStatement::new(vec![Expr::int(1)]), false);
    let keys: Vec<&String> = root.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["selectDistinct", "selectList"]);
}

#[test]
fn test_field_order_follows_clause_order() {
    let stmt = SelectStatement::new(vec![Expr::column("a")])
        .from(TableRef::named("t"))
        .filter(Expr::binary(OperatorKind::Greater, Expr::column("a"), Expr::int(1)))
        .group_by(vec![Expr::column("a")], None)
        .order_by(Expr::column("a"), OrderDirection::Asc)
        .limit(5, None);
    let text = render(&Statement::Select(stmt), false).unwrap();

    let positions: Vec<usize> = [
        "\"selectDistinct\"",
        "\"selectList\"",
        "\"fromTable\"",
        "\"whereClause\"",
        "\"groupBy\"",
        "\"order\"",
        "\"limit\"",
    ]
    .iter()
    .map(|key| text.find(key).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_render_is_deterministic() {
    let build = || {
        Statement::Select(
            SelectStatement::new(vec![
                Expr::column("a").with_alias("x"),
                Expr::function("SUM", vec![Expr::column("b")]),
            ])
            .from(
                TableRef::named("t")
                    .join(JoinKind::Left, TableRef::named("u"), Some(Expr::column("k")))
                    .with_alias("j"),
            )
            .filter(Expr::in_list(Expr::column("a"), vec![Expr::int(1), Expr::int(2)])),
        )
    };
    let stmt = build();

    for pretty in [false, true] {
        let first = render(&stmt, pretty).unwrap();
        let second = render(&stmt, pretty).unwrap();
        let rebuilt = render(&build(), pretty).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, rebuilt);
    }
}

#[test]
fn test_compact_and_pretty_parse_to_same_document() {
    let stmt = Statement::Select(
        SelectStatement::new(vec![Expr::star()])
            .from(TableRef::named("students"))
            .filter(Expr::binary(
                OperatorKind::Like,
                Expr::column("name"),
                Expr::string("A%\"quoted\""),
            ))
            .order_by(Expr::column("name"), OrderDirection::Desc),
    );

    let compact = render(&stmt, false).unwrap();
    let pretty = render(&stmt, true).unwrap();

    assert!(!compact.contains('\n'));
    assert!(pretty.contains("\n  \"selectList\": ["));

    let a: Value = serde_json::from_str(&compact).unwrap();
    let b: Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
    assert_eq!(a["whereClause"]["expr2"]["name"], "A%\"quoted\"");
}
