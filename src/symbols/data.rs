//! Embedded symbol data: reserved words, built-in functions, and the
//! punctuation substitution table.
//!
//! The word lists reproduce the MySQL/MariaDB reserved and non-reserved
//! keyword inventory used for keyword-aware lexing. The punctuation table is
//! ordered so that multi-character operators are substituted before any of
//! their single-character prefixes.

/// Reserved and non-reserved SQL words, uppercase.
pub(crate) const RESERVED_WORDS: &[&str] = &[
    "ACCESSIBLE", "ACTION", "ADD", "ADMIN", "AFTER", "AGAINST", "AGGREGATE", "ALL",
    "ALGORITHM", "ALTER", "ALWAYS", "ANALYZE", "AND", "ANY", "AS", "ASC", "ASCII",
    "ASENSITIVE", "AT", "AUDIT", "AUTHORS", "AUTO_INCREMENT", "AUTOEXTEND_SIZE", "AUTO", "AVG",
    "AVG_ROW_LENGTH", "BACKUP", "BEFORE", "BEGIN", "BETWEEN", "BIGINT", "BINARY", "BINLOG",
    "BIT", "BLOB", "BLOCK", "BOOL", "BOOLEAN", "BOTH", "BTREE", "BY", "BYTE", "CACHE", "CALL",
    "CASCADE", "CASCADED", "CASE", "CATALOG_NAME", "CHAIN", "CHANGE", "CHANGED", "CHAR",
    "CHARACTER", "CHARSET", "CHECK", "CHECKPOINT", "CHECKSUM", "CIPHER", "CLASS_ORIGIN",
    "CLIENT", "CLIENT_STATISTICS", "CLOSE", "COALESCE", "CODE", "COLLATE", "COLLATION",
    "COLUMN", "COLUMN_NAME", "COLUMNS", "COLUMN_ADD", "COLUMN_CHECK", "COLUMN_CREATE",
    "COLUMN_DELETE", "COLUMN_GET", "COMMENT", "COMMIT", "COMMITTED", "COMPACT", "COMPLETION",
    "COMPRESSED", "CONCURRENT", "CONDITION", "CONNECTION", "CONSISTENT", "CONSTRAINT",
    "CONSTRAINT_CATALOG", "CONSTRAINT_NAME", "CONSTRAINT_SCHEMA", "CONTAINS", "CONTEXT",
    "CONTINUE", "CONTRIBUTORS", "CONVERT", "CPU", "CREATE", "CROSS", "CUBE", "CURRENT",
    "CURRENT_DATE", "CURRENT_POS", "CURRENT_ROLE", "CURRENT_TIME", "CURRENT_TIMESTAMP",
    "CURRENT_USER", "CURSOR", "CURSOR_NAME", "DATA", "DATABASE", "DATABASES", "DATAFILE",
    "DATE", "DATETIME", "DAY", "DAY_HOUR", "DAY_MICROSECOND", "DAY_MINUTE", "DAY_SECOND",
    "DEALLOCATE", "DEC", "DECIMAL", "DECLARE", "DEFAULT", "DEFINER", "DELAYED",
    "DELAY_KEY_WRITE", "DELETE", "DESC", "DESCRIBE", "DES_KEY_FILE", "DETERMINISTIC",
    "DIAGNOSTICS", "DIRECTORY", "DISABLE", "DISCARD", "DISK", "DISTINCT", "DISTINCTROW", "DIV",
    "DO", "DOUBLE", "DROP", "DUAL", "DUMPFILE", "DUPLICATE", "DYNAMIC", "EACH", "ELSE",
    "ELSEIF", "ENABLE", "ENCLOSED", "END", "ENDS", "ENGINE", "ENGINES", "ENUM", "ERROR",
    "ERRORS", "ESCAPE", "ESCAPED", "EVENT", "EVENTS", "EVERY", "EXAMINED", "EXCHANGE",
    "EXECUTE", "EXISTS", "EXIT", "EXPANSION", "EXPORT", "EXPLAIN", "EXTENDED", "EXTENT_SIZE",
    "FALSE", "FAILOVER", "FAST", "FAULTS", "FETCH", "FIELDS", "FILE", "FIRST", "FIXED",
    "FLOAT", "FLOAT4", "FLOAT8", "FLUSH", "FOR", "FORCE", "FOREIGN", "FOUND", "FROM", "FULL",
    "FULLTEXT", "FUNCTION", "GENERAL", "GENERATED", "GEOMETRY", "GEOMETRYCOLLECTION",
    "GET_FORMAT", "GET", "GLOBAL", "GOOGLESTATS", "GRANT", "GRANTS", "GROUP", "HANDLER",
    "HARD", "HASH", "HAVING", "HELP", "HIGH_PRIORITY", "HOST", "HOSTS", "HOUR",
    "HOUR_MICROSECOND", "HOUR_MINUTE", "HOUR_SECOND", "ID", "IDENTIFIED", "IDLE", "IF",
    "IGNORE", "IGNORE_SERVER_IDS", "IMPORT", "IN", "INDEX", "INDEXES", "INDEX_STATISTICS",
    "INFILE", "INITIAL_SIZE", "INNER", "INOUT", "INSENSITIVE", "INSERT", "INSERT_METHOD",
    "INSTALL", "INT", "INT1", "INT2", "INT3", "INT4", "INT8", "INTEGER", "INTERVAL", "INTO",
    "IO", "IO_THREAD", "IPC", "IS", "ISOLATION", "ISSUER", "ITERATE", "INVOKER", "JOIN", "KEY",
    "KEYS", "KEY_BLOCK_SIZE", "KILL", "LANGUAGE", "LAST", "LAST_VALUE", "LEADING", "LEAVE",
    "LEAVES", "LEFT", "LESS", "LEVEL", "LIKE", "LIMIT", "LINEAR", "LINES", "LINESTRING",
    "LIST", "LOAD", "LOCAL", "LOCALTIME", "LOCALTIMESTAMP", "LOCK", "LOCKS", "LOGFILE", "LOGS",
    "LONG", "LONGBLOB", "LONGTEXT", "LOOP", "LOW_PRIORITY", "MASTER", "MASTER_CONNECT_RETRY",
    "MASTER_GTID_POS", "MASTER_HOST", "MASTER_LOG_FILE", "MASTER_LOG_POS", "MASTER_PASSWORD",
    "MASTER_PORT", "MASTER_SERVER_ID", "MASTER_SOCKET", "MASTER_SSL", "MASTER_SSL_CA",
    "MASTER_SSL_CAPATH", "MASTER_SSL_CERT", "MASTER_SSL_CIPHER", "MASTER_SSL_CRL",
    "MASTER_SSL_CRLPATH", "MASTER_SSL_KEY", "MASTER_SSL_VERIFY_SERVER_CERT", "MASTER_USER",
    "MASTER_USE_GTID", "MASTER_HEARTBEAT_PERIOD", "MATCH", "MAX_ROWS", "MAX_SIZE", "MAXVALUE",
    "MEDIUM", "MEDIUMBLOB", "MEDIUMINT", "MEDIUMTEXT", "MEMORY", "MERGE", "MESSAGE_TEXT",
    "MICROSECOND", "MIDDLEINT", "MIGRATE", "MINUTE", "MINUTE_MICROSECOND", "MINUTE_SECOND",
    "MIN_ROWS", "MOD", "MODE", "MODIFIES", "MODIFY", "MONTH", "MULTILINESTRING", "MULTIPOINT",
    "MULTIPOLYGON", "MUTEX", "MYSQL_ERRNO", "NAME", "NAMES", "NATIONAL", "NATURAL", "NDB",
    "NDBCLUSTER", "NCHAR", "NEW", "NEXT", "NO", "NO_WAIT", "NODEGROUP", "NONE", "NOT",
    "NO_WRITE_TO_BINLOG", "NULL", "NUMBER", "NUMERIC", "NVARCHAR", "OFFSET", "OLD_PASSWORD",
    "ON", "ONE", "ONLINE", "ONLY", "OPEN", "OPTIMIZE", "OPTIONS", "OPTION", "OPTIONALLY", "OR",
    "ORDER", "OUT", "OUTER", "OUTFILE", "OWNER", "PACK_KEYS", "PAGE", "PAGE_CHECKSUM",
    "PARSER", "PARSE_VCOL_EXPR", "PARTIAL", "PARTITION", "PARTITIONING", "PARTITIONS",
    "PASSWORD", "PERSISTENT", "PHASE", "PLUGIN", "PLUGINS", "POINT", "POLYGON", "PORT",
    "PRECISION", "PREPARE", "PRESERVE", "PREV", "PRIMARY", "PRIVILEGES", "PROCEDURE",
    "PROCESS", "PROCESSLIST", "PROFILE", "PROFILES", "PROXY", "PURGE", "QUARTER", "QUERY",
    "QUICK", "RANGE", "READ", "READ_ONLY", "READ_WRITE", "READS", "REAL", "REBUILD", "RECOVER",
    "REDO_BUFFER_SIZE", "REDOFILE", "REDUNDANT", "REFERENCES", "REGEXP", "RELAY", "RELAYLOG",
    "RELAY_LOG_FILE", "RELAY_LOG_POS", "RELAY_THREAD", "RELEASE", "RELOAD", "REMOVE", "RENAME",
    "REORGANIZE", "REPAIR", "REPEATABLE", "REPLACE", "REPLICATION", "REPEAT", "REQUIRE",
    "RESET", "RESIGNAL", "RESTORE", "RESTRICT", "RESUME", "RETURNED_SQLSTATE", "RETURN",
    "RETURNING", "RETURNS", "REVERSE", "REVOKE", "RIGHT", "RLIKE", "ROLE", "ROLLBACK",
    "ROLLUP", "ROUTINE", "ROW", "ROW_COUNT", "ROWS", "ROW_FORMAT", "RTREE", "SAVEPOINT",
    "SCHEDULE", "SCHEMA", "SCHEMA_NAME", "SCHEMAS", "SECOND", "SECOND_MICROSECOND", "SECURITY",
    "SELECT", "SENSITIVE", "SEPARATOR", "SERIAL", "SERIALIZABLE", "SESSION", "SERVER", "SET",
    "SHARE", "SHOW", "SHUTDOWN", "SIGNAL", "SIGNED", "SIMPLE", "SLAVE", "SLAVES", "SLAVE_POS",
    "SLOW", "SNAPSHOT", "SMALLINT", "SOCKET", "SOFT", "SOME", "SONAME", "SOUNDS", "SOURCE",
    "SPATIAL", "SPECIFIC", "SQL", "SQLEXCEPTION", "SQLSTATE", "SQLWARNING", "SQL_BIG_RESULT",
    "SQL_BUFFER_RESULT", "SQL_CACHE", "SQL_CALC_FOUND_ROWS", "SQL_NO_CACHE",
    "SQL_SMALL_RESULT", "SQL_THREAD", "SQL_TSI_SECOND", "SQL_TSI_MINUTE", "SQL_TSI_HOUR",
    "SQL_TSI_DAY", "SQL_TSI_WEEK", "SQL_TSI_MONTH", "SQL_TSI_QUARTER", "SQL_TSI_YEAR", "SSL",
    "START", "STARTING", "STARTS", "STATS_AUTO_RECALC", "STATS_PERSISTENT",
    "STATS_SAMPLE_PAGES", "STATS_SERVER", "STATS_SERVERS", "STATUS", "STOP", "STORAGE",
    "STRAIGHT_JOIN", "STRING", "SUBCLASS_ORIGIN", "SUBJECT", "SUBPARTITION", "SUBPARTITIONS",
    "SUPER", "SUPPRESS_SAFETY_WARNING", "SUSPEND", "SWAPS", "SWITCHES", "TABLE", "TABLE_NAME",
    "TABLES", "TABLESPACE", "TABLE_STATISTICS", "TABLE_CHECKSUM", "TEMPORARY", "TEMPTABLE",
    "TERMINATED", "TEXT", "THAN", "THEN", "TIME", "TIMESTAMP", "TIMESTAMPADD", "TIMESTAMPDIFF",
    "TINYBLOB", "TINYINT", "TINYTEXT", "TO", "TRAILING", "TRANSACTION", "TRANSACTIONAL",
    "TRIGGER", "TRIGGERS", "TRUE", "TRUNCATE", "TYPE", "TYPES", "UNCOMMITTED", "UNDEFINED",
    "UNDO_BUFFER_SIZE", "UNDOFILE", "UNDO", "UNICODE", "UNION", "UNIQUE", "UNKNOWN", "UNLOCK",
    "UNINSTALL", "UNSIGNED", "UNTIL", "UPDATE", "UPGRADE", "USAGE", "USE", "USER",
    "USER_RESOURCES", "USER_STATISTICS", "USE_FRM", "USING", "UTC_DATE", "UTC_TIME",
    "UTC_TIMESTAMP", "VALUE", "VALUES", "VARBINARY", "VARCHAR", "VARCHARACTER", "VARIABLES",
    "VARYING", "VIA", "VIEW", "VIRTUAL", "WAIT", "WARNINGS", "WEEK", "WEIGHT_STRING", "WHEN",
    "WHERE", "WHILE", "WITH", "WORK", "WRAPPER", "WRITE", "X509", "XOR", "XA", "XML", "YEAR",
    "YEAR_MONTH", "ZEROFILL",
];

/// Built-in SQL function names, uppercase.
pub(crate) const BUILTIN_FUNCTIONS: &[&str] = &[
    "ADDDATE", "BIT_AND", "BIT_OR", "BIT_XOR", "CAST", "COUNT", "CURDATE", "CURTIME",
    "DATE_ADD", "DATE_SUB", "EXTRACT", "GROUP_CONCAT", "MAX", "MID", "MIN", "NOW",
    "ORDERED_CHECKSUM", "POSITION", "SESSION_USER", "STD", "STDDEV", "STDDEV_POP",
    "STDDEV_SAMP", "SUBDATE", "SUBSTR", "SUBSTRING", "SUM", "SYSDATE", "SYSTEM_USER", "TRIM",
    "UNORDERED_CHECKSUM", "VARIANCE", "VAR_POP", "VAR_SAMP",
];

/// Punctuation and operator symbols mapped to their symbolic names.
///
/// Order matters: every multi-character operator appears before each of its
/// prefixes, so a single left-to-right substitution pass never mangles a
/// longer operator (`<=` must not become `LT EQ`).
pub(crate) const PUNCTUATION: &[(&str, &str)] = &[
    ("<=>", "NULLEQ"),
    ("<<", "LSL"),
    (">>", "RSL"),
    ("<=", "LTE"),
    (">=", "GTE"),
    ("<>", "NEQ"),
    ("!=", "NEQ"),
    ("&&", "AND"),
    ("||", "OR"),
    ("/*", "CMTST"),
    ("*/", "CMTEND"),
    ("<", "LT"),
    (">", "GT"),
    ("=", "EQ"),
    ("~", "TILDE"),
    ("!", "EXCLAMATION"),
    ("@", "ATR"),
    ("#", "HASH"),
    ("$", "DOLLAR"),
    ("%", "PERCENT"),
    ("^", "CARET"),
    ("&", "BITAND"),
    ("|", "BITOR"),
    ("*", "STAR"),
    ("(", "LPNR"),
    (")", "RPRN"),
    ("{", "RCBR"),
    ("}", "LCBR"),
    ("[", "LSQBR"),
    ("]", "RSQBR"),
    ("\\", "BSLASH"),
    (":", "COLON"),
    (";", "SEMICOLON"),
    ("\"", "DQUT"),
    ("'", "SQUOT"),
    (",", "COMMA"),
    (".", "PERIOD"),
    ("?", "QMARK"),
    ("/", "FSLASH"),
];

/// Literal-class token names emitted by the canonicalizer.
pub(crate) const NUMBER_TOKENS: &[&str] = &["DECIMAL", "INT", "HEX", "IP_ADDR"];

/// Keywords eligible for case-swapping by the case-randomization operator.
///
/// Deliberately narrower than `RESERVED_WORDS`: the full inventory contains
/// words like TABLE or USER that routinely appear as identifiers in injection
/// payloads, and flipping those would change which schema object the
/// statement refers to on case-sensitive servers.
pub(crate) const COMMON_KEYWORDS: &[&str] = &[
    "ALL", "AND", "AS", "BETWEEN", "BY", "CASE", "CROSS", "DELETE", "DISTINCT", "ELSE", "END",
    "EXISTS", "FALSE", "FROM", "GROUP", "HAVING", "IN", "INNER", "INSERT", "INTO", "IS", "JOIN",
    "LEFT", "LIKE", "LIMIT", "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER", "RIGHT",
    "SELECT", "SET", "THEN", "TRUE", "UNION", "UPDATE", "VALUES", "WHEN", "WHERE",
];
