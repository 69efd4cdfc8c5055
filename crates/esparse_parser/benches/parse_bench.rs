use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bumpalo::Bump;
use esparse_options::{LanguageMode, ParserOptions};
use esparse_parser::Parser;

// A medium-size script (~100 lines) mixing most of the grammar
const SCRIPT_SOURCE: &str = r#"
'use strict';
import { readFile } from "fs";
import * as path from "path";

// Class with fields, accessors and a static block
class UserService extends Base {
    static count = 0;
    users = new Map();

    static {
        UserService.count = 0;
    }

    constructor(options = {}) {
        super(options);
        this.nextId = options.start ?? 1;
    }

    get size() {
        return this.users.size;
    }

    set size(value) {
        throw new Error(`read-only: ${value}`);
    }

    createUser(name, email, ...tags) {
        const user = {
            id: this.nextId++,
            name,
            email,
            tags: [...tags],
            preferences: { theme: 'light', notifications: true, language: 'en' },
        };
        this.users.set(user.id, user);
        return user;
    }

    *ids() {
        for (const [id] of this.users) yield id;
    }

    async load(id) {
        const data = await fetch(`/users/${id}`);
        return data?.json?.() ?? null;
    }
}

function filterUsers(users, predicate = (u) => u.active) {
    return users.filter(predicate);
}

async function* stream(source) {
    for await (const chunk of source) {
        yield* chunk.lines();
    }
}

const processUsers = (users) => {
    let count = 0;
    for (let i = 0; i < users.length; i++) {
        const { age = 0, name: { first, last } = {} } = users[i];
        if (age > 18 && first !== undefined) {
            count += 1;
        } else if (last) {
            continue;
        }
    }
    return count;
};

var re = /ab+c/gi, big = 1_000_000n, hex = 0xFF;
label: while (true) {
    switch (typeof re) {
        case "object":
            break label;
        default:
            do { hex >>>= 1; } while (hex > 1);
    }
}

try {
    JSON.parse("{}");
} catch {
    console.log('failed');
} finally {
    void 0;
}

export { UserService, filterUsers as filter };
export default processUsers;
//# sourceMappingURL=bench.js.map
"#;

fn bench_parse_script(c: &mut Criterion) {
    c.bench_function("parse_script_medium", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let parser = Parser::new(
                &arena,
                "bench.js",
                black_box(SCRIPT_SOURCE),
                ParserOptions::default(),
            );
            let result = parser.parse_program();
            black_box(result.features);
        });
    });
}

fn bench_parse_legacy_mode(c: &mut Criterion) {
    let options = ParserOptions::new(LanguageMode::Es3, false);
    c.bench_function("parse_script_medium_es3", |b| {
        b.iter(|| {
            let arena = Bump::new();
            let parser = Parser::new(&arena, "bench.js", black_box(SCRIPT_SOURCE), options);
            let result = parser.parse_program();
            black_box(result.diagnostics.len());
        });
    });
}

criterion_group!(benches, bench_parse_script, bench_parse_legacy_mode);
criterion_main!(benches);
