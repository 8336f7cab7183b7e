//! End-to-end normalization of one query mixing every lexical trap:
//! comment markers inside strings and strings inside comments, doubled and
//! mixed quotes, signed literals in operator chains, quoted identifiers
//! with spaces, and enum lists.

use pretty_assertions::assert_eq;
use unparam::{normalize, normalize_default, Options};

const QUERY: &str = "
SELECT
    *
FROM
(
    SELECT
        -- One line comment with /* stream comment inside of it */ and another right after -- I want my independence
        DISTINCT unique_random_numbers_anyway,
        (
            SELECT
                COUNT(*),
                *
            FROM whatever
            FORCE INDEX (bigger_than_the_table_itself)
        ),
        @var_Name := CONCAT('''', \"'abc'\", \"/*' -- Hello'*/\", '\r\n\t -- line comment inside string? It can''t be. /* block comment */ '''' '),
        '\"/*''\r\n\t*/\"', -- Confusing start of block comment: /*
        -3 + (-9) - - 3 + ( -    99 + 2 % -5 | 333 ~999&111111111 * -0.00  *  +   33 >> +123 << ++321.22) ^ 0xAFe0 AS `Computer error 123`
    FROM users /* Why do we have stream comments? */
    LEFT JOIN something ON something.user_id = users.user_id
    WHERE
        -- We joined you to kill you. TROJAN JOIN
        something.user_id IS NULL

        AND\t-1=-+-+-++-1
        AND -1=-+-+-++1

        AND\t`quoted_name`='2019-12-12'
        OR`quoted_name` >= '2019-12-12T12:34:56Z'

        -- NOT IN and IN may vary in number of elements dynamically for the same query.
        OR xxx NOT IN ( - 999, 'AAA', -59)
        AND zzz not in ('a', -12.9999, 0xAFED13, (select name from cache limit 1), 0, column_name)

        AND\t-user_id = -123 -- That minus sign must be gone. Only questions must remain.
        AND\twage > 0.1

        AND\tname LIKE '%I will become a question mark% start of block comment: /*'
    ORDER BY
        user_date_created DESC /*
        Multi-line comment means importance!
    */
    LIMIT 1460 /* LIMIT HERE? */ -- Noooo!

    UNION -- ALL

    SELECT
        `database name with spaces`./*What am I?*/`012345799`
    FROM xxxx
)
ORDER BY FIELD(user_phone_call_uniqueid, 'abc', 'def', 'xxx', 1, -1)
";

const EXPECTED: &str = "SELECT * FROM ( SELECT DISTINCT unique_random_numbers_anyway, \
( SELECT COUNT(*), * FROM whatever FORCE INDEX (bigger_than_the_table_itself) ), \
@var_Name := CONCAT(?, ?, ?, ?), ?, \
? + (?) - ? + ( ? + ? % ? | ? ~?&? * ? * + ? >> +? << ++?) ^ ? AS `Computer error 123` \
FROM users LEFT JOIN something ON something.user_id = users.user_id \
WHERE something.user_id IS NULL AND ?=-+-+-++? AND ?=-+-+-++? \
AND `quoted_name`=? OR`quoted_name` >= ? \
OR xxx NOT IN (?) \
AND zzz not in (?, ?, ?, (select name from cache limit ?), ?, column_name) \
AND -user_id = ? AND wage > ? AND name LIKE ? \
ORDER BY user_date_created DESC LIMIT ? UNION \
SELECT `database name with spaces`.`012345799` FROM xxxx ) \
ORDER BY FIELD(user_phone_call_uniqueid, ?)";

fn reducing() -> Options {
    Options::default()
        .with_reduce_enums_to_one_element(true)
        .with_write_syntax_errors_to_console(false)
}

#[test]
fn stripped_whitespace() {
    let output = normalize(QUERY, &reducing()).expect("fixture normalizes");
    assert_eq!(output, EXPECTED);
}

#[test]
fn kept_whitespace_differs_only_in_spacing() {
    let options = reducing().with_strip_whitespace(false);
    let output = normalize(QUERY, &options).expect("fixture normalizes");
    assert!(!output.contains(['\r', '\n', '\t']), "line breaks survived: {output:?}");
    assert!(output.starts_with(' '), "leading whitespace is kept");
    assert!(!output.ends_with(' '), "trailing whitespace is trimmed");
    let collapsed = output.split_whitespace().collect::<Vec<_>>().join(" ");
    assert_eq!(collapsed, EXPECTED);
}

#[test]
fn output_is_a_fixed_point() {
    let once = normalize(QUERY, &reducing()).expect("fixture normalizes");
    let twice = normalize(&once, &reducing()).expect("output normalizes");
    assert_eq!(once, twice);
}

#[test]
fn without_enum_reduction_lists_keep_their_length() {
    let output = normalize_default(QUERY).expect("fixture normalizes");
    assert!(output.contains("OR xxx NOT IN ( ?, ?, ?)"), "{output}");
    assert!(
        output.contains("ORDER BY FIELD(user_phone_call_uniqueid, ?, ?, ?, ?, ?)"),
        "{output}"
    );
}

#[test]
fn literal_content_is_gone() {
    let output = normalize_default(QUERY).expect("fixture normalizes");
    for fragment in ["2019-12-12", "AAA", "I will become", "Hello", "1460", "0xAFe0"] {
        assert!(!output.contains(fragment), "{fragment:?} leaked into {output}");
    }
}

#[test]
fn normalizes_concurrently() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Options>();
    assert_send_sync::<unparam::NormalizeError>();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| normalize(QUERY, &reducing())))
        .collect();
    for handle in handles {
        let output = handle
            .join()
            .expect("worker thread completes")
            .expect("fixture normalizes");
        assert_eq!(output, EXPECTED);
    }
}
